use parse_display::Display;

pub const ETH_CONSENSUS_VERSION: &str = "eth-consensus-version";
pub const ETH_EXECUTION_PAYLOAD_BLINDED: &str = "eth-execution-payload-blinded";
pub const ETH_EXECUTION_PAYLOAD_VALUE: &str = "eth-execution-payload-value";

#[derive(Clone, Copy, Debug, Display)]
#[display(style = "lowercase")]
pub enum Direction {
    Request,
    Response,
}
