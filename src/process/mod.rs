/*!
 * Process Management
 * Process lifecycle and the records finished processes leave behind
 */

mod lifecycle;
mod types;

pub use lifecycle::Process;
pub use types::{ProcessMetrics, ProcessRecord};
