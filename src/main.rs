use anyhow::Result;

fn main() -> Result<()> {
    session_cleaner::cli::run()
}
