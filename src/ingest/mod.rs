/// Upstream data source clients.
///
/// Submodules:
/// - `airnow`: EPA AirNow current observations by zip code.

pub mod airnow;
