//! Integration tests for the webapp bootstrap path

use ninja_app::AppContext;
use ninja_common::{country_name, hash_sha512, sha512_hex, Error, Location};
use serial_test::serial;

#[test]
#[serial]
fn test_bootstrap_from_env() -> anyhow::Result<()> {
    std::env::remove_var("VITE_ENV");
    std::env::set_var("WEBAPP_URL", "https://app.markdown.ninja/login");

    let location = Location::from_env()?;
    std::env::remove_var("WEBAPP_URL");

    let ctx = AppContext::bootstrap(&location);
    let config = ctx.config()?;

    assert_eq!(config.env, "production");
    assert_eq!(config.sites_port, "");
    assert_eq!(config.oidc_redirect_uri, "https://app.markdown.ninja/auth");
    Ok(())
}

#[test]
fn test_config_json_shape() -> anyhow::Result<()> {
    let mut ctx = AppContext::new();
    ctx.create_config(Some("dev"), &Location::parse("http://localhost:8080")?);

    let json = serde_json::to_value(ctx.config()?)?;
    assert_eq!(
        json,
        serde_json::json!({
            "env": "dev",
            "sitesPort": ":4000",
            "oidcRedirectUri": "http://localhost:8080/auth",
            "cmsBaseUrl": "https://cms.markdown.ninja",
            "githubRepository": "https://github.com/bloom42/markdown-ninja",
        })
    );
    Ok(())
}

#[test]
fn test_config_read_before_bootstrap() {
    let ctx = AppContext::new();
    let err = ctx.config().unwrap_err();
    assert_eq!(err, Error::NotInitialized);
    assert_eq!(err.error_code(), "CONFIG_NOT_INITIALIZED");
}

#[test_log::test]
fn test_context_and_global_lookups_agree() {
    let ctx = AppContext::new();
    for code in ["US", "JP", "BR", "ZZ", ""] {
        assert_eq!(ctx.country_name(code), country_name(code));
    }
}

#[tokio::test]
async fn test_hash_many_buffers() {
    let inputs: Vec<Vec<u8>> = (0..64).map(|n| vec![b'x'; n * 17]).collect();

    let mut tasks = tokio::task::JoinSet::new();
    for input in inputs.clone() {
        tasks.spawn(async move {
            let hash = hash_sha512(input.clone()).await;
            (input, hash)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (input, hash) = joined.unwrap();
        let hash = hash.unwrap();
        assert_eq!(hash.len(), 128);
        assert_eq!(hash, sha512_hex(&input));
    }
}
