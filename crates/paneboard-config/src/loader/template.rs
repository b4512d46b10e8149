//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Paneboard Configuration
# Only override what you want to change -- missing fields use defaults.

[workspace]
# gap_px = 6                  # 0-64
# width = 1280                # 1-16384
# height = 720                # 1-16384
# isolation_path = "/path/to/profile"   # unset: panes share one environment
# block_popups = true
# disable_context_menu = true

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
}
