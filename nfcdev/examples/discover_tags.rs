// Discover every supported tag type and print what the driver reports.
//
// Run with `cargo run --example discover_tags --features chardev [-- /dev/nfcN]`.

use nfcdev::prelude::*;

fn print_iso14443a(tag: &Iso14443a) {
    println!("ATQA: {}", tag.atqa_display());
    println!("SAK: {:02x}", tag.sak());
    println!("UID: {}", tag.uid_display());
}

fn print_st25tb(tag: &St25tb) {
    println!("UID: {}", tag.uid_display());
    let id: St25tbIdentity = tag.identity();
    if !id.msb_ok() {
        println!("Unexpected MSB, got {}", id.logical_uid()[0]);
    }
    match id.manufacturer() {
        Some(name) => println!("Manufacturer: {}", name),
        None => println!("Manufacturer: unknown ({})", id.manufacturer_code()),
    }
    match id.model() {
        Some(model) => println!("Model: {}", model.name),
        None if id.manufacturer().is_some() => println!("Model: unknown ({})", id.model_byte()),
        None => {}
    }
    println!("Serial number: {}", id.serial());
}

fn print_tag(info: &TagInfo) {
    println!("{}", info.tag_type());
    match info {
        TagInfo::Iso14443a(kind, tag) => {
            print_iso14443a(tag);
            if *kind == nfcdev::tag::Iso14443aKind::MifareClassic {
                println!(
                    "Product: {}",
                    tag.mifare_classic_product().unwrap_or("Unknown")
                );
            }
        }
        TagInfo::Iso14443a4(_, tag) => {
            print_iso14443a(tag.base());
            println!("ATS: {}", tag.ats_display());
        }
        TagInfo::Iso14443b(tag) => {
            println!("PUPI: {}", tag.pupi_display());
            println!("Application data: {}", tag.application_data_display());
            println!("Protocol info: {}", tag.protocol_info_display());
        }
        TagInfo::St25tb(tag) => print_st25tb(tag),
        TagInfo::Nfcf(_) => {}
    }
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
    println!("Discovering tags (exit with control-C)\n");
    dev.discover(DiscoverParams::new(Protocols::ALL))?;

    loop {
        match dev.read_message()? {
            Message::DetectedTag(info) => {
                print_tag(&info);
                println!();
            }
            other => println!("Unexpected message (type={})", other.message_type().as_u8()),
        }
    }
}
