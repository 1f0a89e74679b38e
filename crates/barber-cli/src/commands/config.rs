use barber_config::BarberConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::output::output;

const REDACTED: &str = "<redacted>";

pub fn handle(
    action: &ConfigCommands,
    config: &BarberConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => output(&redacted(config), flags.format),
    }
}

fn redacted(config: &BarberConfig) -> BarberConfig {
    let mut shown = config.clone();
    for secret in [&mut shown.backend.anon_key, &mut shown.backend.access_token] {
        if !secret.is_empty() {
            REDACTED.clone_into(secret);
        }
    }
    shown
}

#[cfg(test)]
mod tests {
    use barber_config::BackendConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn secrets_are_masked_and_the_rest_kept() {
        let config = BarberConfig {
            backend: BackendConfig {
                url: "https://abc.backend.example".into(),
                anon_key: "anon-key".into(),
                access_token: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };

        let shown = redacted(&config);
        assert_eq!(shown.backend.url, "https://abc.backend.example");
        assert_eq!(shown.backend.anon_key, REDACTED);
        assert_eq!(shown.backend.access_token, "");
        assert_eq!(shown.access.home_path, config.access.home_path);
    }
}
