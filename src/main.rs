use checkmate::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
