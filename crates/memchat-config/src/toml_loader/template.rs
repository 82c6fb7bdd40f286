//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# memchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API credential is read from GOOGLE_API_KEY (environment or .env), never from this file.

[model]
# name = "gemini-2.0-flash"
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 4096   # 1-65536

[chat]
# context_turns = 6          # 0-100, prior turns replayed into each prompt
# history_preview = 3        # 1-50, turns shown by /history
# preview_chars = 50         # 10-500

[api]
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# connect_timeout_secs = 10  # 1-120
# request_timeout_secs = 120 # 1-600
# page_size = 50             # 1-1000

[logging]
# level = "WARNING"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
