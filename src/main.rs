use nftviewer::{
    config::Config,
    logger::{self, LogTag},
    viewer,
};

/// Main entry point for nftviewer
///
/// Sequence:
/// - Load `.env` so ALCHEMY_API_KEY / NFT_CONTRACT_ADDRESS are visible
/// - Initialize the logger (reads --debug / --quiet from the arguments)
/// - Hand control to the interactive viewer
///
/// Fatal viewer errors surface here and are printed as a single localized
/// diagnostic; the Aborted states (no connectivity, invalid address) print
/// their own messages inside the driver and return normally.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    logger::init();
    logger::debug(LogTag::System, "nftviewer starting up");

    let config = Config::from_env();

    if let Err(e) = viewer::run(&config).await {
        println!("Có lỗi xảy ra: {}", e);
    }

    Ok(())
}
