//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Pictionar(ai) Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[text]
# model = "gpt-3.5-turbo"
# max_tokens = 256         # unset: let the API decide
# temperature = 1.0        # 0.0-2.0

[image]
# model = "dall-e-3"
# size = "1024x1024"       # 1024x1024, 1792x1024, 1024x1792
# quality = "standard"     # standard, hd

[ui]
# open_images = true       # open each generated image in the browser
"##
    .to_string()
}
