use emporium_cli::{Settings, load_items, run};

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    emporium_observability::init(settings.log_format);

    let items = load_items(&settings)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&settings, items, &mut stdin.lock(), &mut stdout.lock())
}
