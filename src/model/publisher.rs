use serde::{Deserialize, Serialize};

/// Parameters for `listPublishers`. The operation takes no inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPublishersParams {}
