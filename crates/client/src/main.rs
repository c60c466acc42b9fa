//! contactbox-client CLI entry point.

use clap::Parser;
use contactbox_client::cli::{Cli, Commands, OutputFormat};
use contactbox_client::client::ContactboxClient;
use contactbox_client::form::{FormController, TerminalView};
use contactbox_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ContactboxClient::new(&cli.base_url);

    match cli.command {
        Commands::Submit(submit_cmd) => {
            let form = submit_cmd.to_form().await?;
            let controller = FormController::new(client);
            // JSON output keeps stdout machine readable
            let quiet = cli.quiet || matches!(cli.format, OutputFormat::Json);
            let mut view = TerminalView::new(quiet);

            match controller.submit(&mut view, &form).await {
                Ok(contact_id) => match cli.format {
                    OutputFormat::Json => println!(
                        "{}",
                        format_output(&serde_json::json!({ "contactId": contact_id }), cli.format)
                    ),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("{}", pretty::format_contact_id(contact_id));
                        }
                    }
                },
                // The view has already reported the failure
                Err(_) => std::process::exit(1),
            }
        }
        Commands::UploadUrl(upload_cmd) => {
            let grant = client
                .request_upload_url(&upload_cmd.file_name, &upload_cmd.file_type)
                .await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&grant, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_upload_url(&grant)),
            }
        }
        Commands::Contact(contact_cmd) => {
            let response = client.submit_contact(&contact_cmd.to_request()).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_contact_response(&response))
                }
            }
        }
    }

    Ok(())
}
