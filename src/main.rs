//! # Factura CLI
//!
//! Command-line interface for invoice document generation.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP server
//! factura serve --listen 0.0.0.0:8080
//!
//! # Render a request file to HTML on stdout
//! factura render request.json
//!
//! # Render to a PDF file, forcing Spanish
//! factura render request.json --lang es --pdf invoice.pdf
//!
//! # Write the HTML preview to a file
//! factura render request.json --html invoice.html
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use factura::{
    invoice::{DocumentRequest, Language},
    server::{serve, ServerConfig},
    DocumentModel, FacturaError,
};

/// Factura - Invoice document generation utility
#[derive(Parser, Debug)]
#[command(name = "factura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP preview/download server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },
    /// Render one invoice from a JSON request file
    Render {
        /// Path to a JSON file shaped like the API request body
        input: PathBuf,

        /// Override the document language (en or es)
        #[arg(long)]
        lang: Option<String>,

        /// Write PDF output to this file
        #[arg(long, value_name = "FILE")]
        pdf: Option<PathBuf>,

        /// Write the HTML document to this file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), FacturaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => {
            serve(ServerConfig {
                listen_addr: listen,
            })
            .await
        }
        Commands::Render {
            input,
            lang,
            pdf,
            html,
        } => render_file(&input, lang.as_deref(), pdf.as_deref(), html.as_deref()),
    }
}

fn render_file(
    input: &std::path::Path,
    lang: Option<&str>,
    pdf_out: Option<&std::path::Path>,
    html_out: Option<&std::path::Path>,
) -> Result<(), FacturaError> {
    let body = fs::read_to_string(input)?;
    let request: DocumentRequest = serde_json::from_str(&body)
        .map_err(|e| FacturaError::InvalidInput(format!("{}: {}", input.display(), e)))?;

    let language = lang.map(Language::parse).unwrap_or(request.language);
    let profile = request.profile();
    let document = DocumentModel::build(&request.invoice, &profile, language).to_html();

    if let Some(path) = html_out {
        fs::write(path, &document)?;
        println!("Wrote {}", path.display());
    }

    if let Some(path) = pdf_out {
        let bytes = factura::pdf::to_pdf(&document)?;
        fs::write(path, &bytes)?;
        println!("Wrote {}", path.display());
    }

    // Default to printing the HTML when no output file was requested
    if html_out.is_none() && pdf_out.is_none() {
        print!("{}", document);
    }

    Ok(())
}
