pub mod docs;
pub mod extract;
pub mod init;

use super::args::CommonArgs;
use crate::core::ContextOptions;

fn context_options(common: &CommonArgs) -> ContextOptions {
    ContextOptions {
        source_root: common.source_root.clone(),
    }
}
