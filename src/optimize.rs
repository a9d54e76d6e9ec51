use crate::error::Result;
use crate::plugins::CompressorPlugin;

/// Run a byte payload through every plugin in the list, in order.
///
/// A plugin whose sniff does not recognize the payload is skipped, so the
/// default list (one plugin per family) applies exactly one compressor to a
/// well-formed image. The first plugin error aborts the call; the output of
/// one plugin feeds the next, and may end up larger than the input.
pub fn optimize_bytes(input: &[u8], plugins: &[Box<dyn CompressorPlugin>]) -> Result<Vec<u8>> {
    let mut data = input.to_vec();
    for plugin in plugins {
        if plugin.accepts(&data) {
            data = plugin.compress(&data)?;
        }
    }
    Ok(data)
}
