use colored::*;
use duidgen_core::Duid;

use crate::terminal::{format, print};

/// Prints the fields of `duid` as a tree.
pub fn decode(duid: &Duid, quiet: u8) -> anyhow::Result<()> {
    if quiet == 0 {
        print::header("decoded duid");
    }

    print::tree_head(duid.duid_type().code().into(), duid.duid_type().label());
    let details: Vec<(String, ColoredString)> = format::duid_to_details(duid);
    print::as_tree_one_level(details);

    Ok(())
}
