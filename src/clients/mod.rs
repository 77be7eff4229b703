pub mod indeed;
pub mod monster;
pub mod simplyhired;
pub mod ziprecruiter;

pub use indeed::IndeedClient;
pub use monster::MonsterClient;
pub use simplyhired::SimplyHiredClient;
pub use ziprecruiter::ZipRecruiterClient;

use crate::Result;
use crate::board::JobBoard;

/// Every supported board, in the order the fallback chain tries them.
pub fn boards_by_priority() -> Result<Vec<Box<dyn JobBoard>>> {
    Ok(vec![
        Box::new(ZipRecruiterClient::new()?),
        Box::new(SimplyHiredClient::new()?),
        Box::new(MonsterClient::new()?),
        Box::new(IndeedClient::new()?),
    ])
}
