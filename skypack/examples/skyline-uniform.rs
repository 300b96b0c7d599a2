use skypack::{InputItem, SkylinePacker};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5u64)
        .map(|id| InputItem::new(id, (128, 128)))
        .collect();

    let packer = SkylinePacker::new();
    let result = packer.pack((256, 256), inputs).expect("bin size is valid");

    println!("Pack result: {:#?}", result);
    println!(
        "{} of {} placed, {:.0}% of the bin used",
        result.placed().count(),
        result.items().len(),
        result.occupancy() * 100.0
    );
}
