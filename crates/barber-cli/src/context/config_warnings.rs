use barber_config::BarberConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &BarberConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &BarberConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.backend.is_configured() && has_env_prefix(&env_keys, "BARBER_BACKEND") {
        warnings.push(
            "backend config appears default while BARBER_BACKEND* env vars exist. Use double underscores (example: BARBER_BACKEND__ANON_KEY)."
                .to_string(),
        );
    }

    if !config.auth.is_signed_in() && has_env_prefix(&env_keys, "BARBER_AUTH") {
        warnings.push(
            "no signed-in subject while BARBER_AUTH* env vars exist. Use double underscores (example: BARBER_AUTH__SUBJECT_ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
