use panelgrab_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_download, run_list};
use panelgrab_lib::error::PanelgrabError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PanelgrabError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Download(params) => {
            let allow_failures = params.allow_failures;
            let summary = run_download(params).await?;
            summary.check(allow_failures)?;
        }
        ResolvedCommand::List(params) => {
            run_list(params).await?;
        }
    }

    Ok(())
}
