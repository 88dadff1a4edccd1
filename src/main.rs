use tracing_subscriber::EnvFilter;

use krb5_login_config::{prepare_login, ConnectionAuthResolver, KerberosAuthSettings, LoginPlan, NativeGss};

/// Prints the login plan for connection properties given as `key=value`
/// arguments, e.g. `resolve_login_config useDefaultJaasConfig=true`.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let properties = std::env::args()
        .skip(1)
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) => Ok((key.to_string(), value.to_string())),
            None => Err(anyhow::anyhow!("expected key=value, got '{}'", arg)),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let settings = KerberosAuthSettings::from_properties(properties)?;
    let resolver = ConnectionAuthResolver::global()?;

    match prepare_login(&resolver, &settings, NativeGss::from_env())? {
        LoginPlan::NativeCredential => println!("native GSS credential"),
        LoginPlan::LoginModules { context, mode, modules } => {
            println!("context: {} ({:?})", context, mode);
            for module in modules {
                println!("  {} {}", module.module(), module.control_flag());
            }
        }
    }
    Ok(())
}
