//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod show;

pub(crate) use convert::ConvertArgs;
pub(crate) use show::ShowArgs;

use taglist_config::Config;
use taglist_render::TableRenderer;
use taglist_taginfo::{TaginfoClient, Taglist};

use crate::error::CliError;

/// Build the fetch-and-render adapter described by `config`.
fn create_taglist(config: &Config) -> Result<Taglist<TaginfoClient>, CliError> {
    let renderer = TableRenderer::new(config.locale_table()?, config.link_builder());
    let client = TaginfoClient::new(&config.taginfo.url, config.taginfo.timeout());
    Ok(Taglist::new(client, renderer))
}
