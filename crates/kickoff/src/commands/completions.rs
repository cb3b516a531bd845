use clap::ArgMatches;
use clap_complete::Shell;
use tracing::info;

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = crate::app::build_cli();
    clap_complete::generate(shell, &mut cmd, "kickoff", &mut std::io::stdout());

    info!(event = "cli.completions_completed", shell = %shell);
    Ok(())
}
