/// Registered names of the commands exposed by the binary.
pub const FILE_CHECKOUT: &str = "spo file checkout";

pub const FILE_CHECKOUT_DESCRIPTION: &str = "Checks out specified file";
