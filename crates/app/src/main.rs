use difactura_invoicing::config::env_lookup;

fn main() -> anyhow::Result<()> {
    difactura_observability::init();

    let config = difactura_app::load_config(env_lookup)?;

    let view = difactura_app::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
