use subsweep_common::config::Config;
use subsweep_core::setup;

use crate::commands::install::print_summary;

pub async fn remove(cfg: &Config) {
    let summary = setup::remove(cfg).await;
    print_summary("Removal", &summary);
}
