use ld_memory::{Memory, MemorySection};

fn main() {
    let boards = ["NRF52840DK", "NRF52DK", "NRF5340DK"]
        .into_iter()
        .filter(|board| std::env::var_os(format!("CARGO_FEATURE_{board}")).is_some())
        .count();
    assert!(
        boards == 1,
        r#"led-chase-app: select exactly one board feature: "nrf52840dk", "nrf52dk" or "nrf5340dk""#
    );

    let (ram, rom, prefix) = if std::env::var_os("CARGO_FEATURE_NRF52840DK").is_some() {
        (256, 1024, "NRF52840_FLASH")
    } else if std::env::var_os("CARGO_FEATURE_NRF52DK").is_some() {
        (64, 512, "NRF52832_FLASH")
    } else {
        (512, 1024, "NRF5340_FLASH")
    };

    // generate linker script
    let memory = Memory::new()
        .add_section(MemorySection::new("RAM", 0x20000000, ram * 1024))
        .add_section(
            MemorySection::new("FLASH", 0x0, rom * 1024)
                .pagesize(4096)
                .from_env_with_prefix(prefix),
        );

    memory.to_cargo_outdir("memory.x").expect("wrote memory.x");

    println!("cargo:rerun-if-changed=build.rs");
}
