use clap::{Args, Parser, Subcommand};

use crate::commands::FILE_CHECKOUT_DESCRIPTION;
use crate::error::Error;
use crate::session::Session;
use crate::utils::{is_valid_guid, is_valid_sharepoint_url};

pub const FILE_CHECKOUT_EXAMPLES: &str = "\
Examples:
  Check out the file with ID b2307a39-e878-458b-bc90-03bc578531d6 located in site
  https://contoso.sharepoint.com/sites/project-x
    spo file checkout --webUrl https://contoso.sharepoint.com/sites/project-x --id 'b2307a39-e878-458b-bc90-03bc578531d6'

  Check out the file with server-relative URL /sites/project-x/documents/Test1.docx
  located in site https://contoso.sharepoint.com/sites/project-x
    spo file checkout --webUrl https://contoso.sharepoint.com/sites/project-x --fileUrl '/sites/project-x/documents/Test1.docx'

  Check out a file in the tenant root site using a site-relative URL
    spo file checkout --webUrl https://contoso.sharepoint.com --fileUrl 'Shared Documents/Report.xlsx'";

/// Command line arguments supported by the spo binary.
#[derive(Debug, Parser)]
#[command(
    name = "spo",
    about = "Manage SharePoint Online files from the command line.",
    version,
    author,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Bearer token used to authenticate against SharePoint Online.
    #[arg(
        long = "accessToken",
        value_name = "accessToken",
        env = "SPO_ACCESS_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub access_token: Option<String>,

    /// Print errors as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn session(&self) -> Session {
        Session::new(self.access_token.clone())
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Work with files stored in SharePoint Online document libraries.
    File {
        #[command(subcommand)]
        command: FileCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum FileCommands {
    #[command(about = FILE_CHECKOUT_DESCRIPTION, after_help = FILE_CHECKOUT_EXAMPLES)]
    Checkout(FileCheckoutOptions),
}

/// Options accepted by `spo file checkout`.
#[derive(Debug, Clone, Default, Args)]
pub struct FileCheckoutOptions {
    /// The URL of the site where the file is located
    #[arg(short = 'u', long = "webUrl", value_name = "webUrl")]
    pub web_url: Option<String>,

    /// The ID of the file to checkout
    #[arg(short = 'i', long = "id", value_name = "id")]
    pub id: Option<String>,

    /// The server- or site-relative URL of the file to checkout
    #[arg(short = 'f', long = "fileUrl", value_name = "fileUrl")]
    pub file_url: Option<String>,

    /// Runs command with debug logging
    #[arg(long)]
    pub debug: bool,

    /// Runs command with verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl FileCheckoutOptions {
    /// Check the options in order and report the first violated constraint.
    pub fn validate(&self) -> Result<(), Error> {
        let web_url = self.web_url.as_deref().ok_or(Error::MissingWebUrl)?;
        if !is_valid_sharepoint_url(web_url) {
            return Err(Error::InvalidWebUrl(web_url.to_string()));
        }

        match (self.id.as_deref(), self.file_url.as_deref()) {
            (None, None) => Err(Error::MissingFileReference),
            (Some(_), Some(_)) => Err(Error::ConflictingFileReference),
            (Some(id), None) if !is_valid_guid(id) => Err(Error::InvalidId(id.to_string())),
            _ => Ok(()),
        }
    }

    /// Whether completion should be reported to the user.
    pub fn reports_progress(&self) -> bool {
        self.debug || self.verbose
    }
}
