use std::io;

use stockroom_shell::{Prompt, Shell, ShellConfig};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = ShellConfig::from_env();
    tracing::debug!(?config, "starting shell");

    let prompt = Prompt::new(io::stdin().lock(), io::stdout().lock());
    let mut shell = Shell::new(prompt);
    if config.seed_on_start {
        shell.load_sample_items()?;
    }
    shell.run()
}
