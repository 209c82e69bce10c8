// Select ST25TB tags one after the other and dump the system block and the
// user data blocks.
//
// Run with `cargo run --example st25tb_read_user_data --features chardev [-- /dev/nfcN]`.

use nfcdev::constants::{ST25TB_SYSTEM_BLOCK, ST25TB_USER_BLOCKS};
use nfcdev::prelude::*;

fn process_st25tb_tag(dev: &mut Device<Checked>, tag: &St25tb) -> Result<()> {
    println!("UID: {}", tag.uid_display());
    let id = tag.identity();
    if !id.msb_ok() {
        println!("Unexpected MSB, got {}", id.logical_uid()[0]);
    }
    if id.manufacturer_code() != 0x02 {
        println!("Not a STMicroelectronics chip, will read block 255 anyway");
    }

    match tag.read_block(dev, ST25TB_SYSTEM_BLOCK) {
        Ok(data) => println!(
            "System block ({}): {}",
            ST25TB_SYSTEM_BLOCK,
            DisplayBytes::from_wire(&data)
        ),
        Err(Error::TransceiveFailed) => {
            println!("Read error (tag removed?)");
            return Ok(());
        }
        Err(Error::UnexpectedMessage { actual, .. }) => {
            println!("Unexpected message (type={})", actual);
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    for block in ST25TB_USER_BLOCKS {
        match tag.read_block(dev, block) {
            Ok(data) => println!(
                "User data block {}: {}",
                block,
                DisplayBytes::from_wire(&data)
            ),
            Err(Error::TransceiveFailed) => {
                println!("Read error (tag removed?)");
                return Ok(());
            }
            Err(Error::UnexpectedMessage { actual, .. }) => {
                println!("Unexpected message (type={})", actual);
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut builder = DeviceBuilder::new();
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.path(path);
    }
    let mut dev = builder.build()?;
    println!("Version check: {:#018x}", dev.protocol_version()?);
    println!("Chip model: {}", dev.identify()?);
    println!("Selecting ST25TB tags (exit with control-C)\n");
    let params = DiscoverParams::new(Protocols::ST25TB).select();
    dev.discover(params)?;

    loop {
        match dev.read_message()? {
            Message::SelectedTag(TagInfo::St25tb(tag)) => {
                process_st25tb_tag(&mut dev, &tag)?;
                dev.idle()?;
            }
            Message::SelectedTag(_) => {
                println!("Unexpected tag type");
                dev.idle()?;
            }
            Message::IdleModeAcknowledge => {
                println!("Selecting another tag (exit with control-C)\n");
                dev.discover(params)?;
            }
            other => println!("Unexpected message (type={})", other.message_type().as_u8()),
        }
    }
}
