use num_bigint::BigUint;
use packed_store::{PackedArrayStore, StoreConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    println!("=== Packed Store Examples ===\n");

    // Example 1: Sensor samples
    if let Err(e) = example_sensor_samples() {
        eprintln!("  failed: {e}");
    }

    // Example 2: Growth
    if let Err(e) = example_growth() {
        eprintln!("  failed: {e}");
    }

    // Example 3: Memory comparison
    if let Err(e) = example_memory_savings() {
        eprintln!("  failed: {e}");
    }
}

fn example_sensor_samples() -> Result<(), packed_store::PackedStoreError> {
    println!("Example 1: 10-bit ADC samples behind a 5-byte header");

    let config = StoreConfig::new(1_563_669_060u32, 5, 10);
    let mut samples = PackedArrayStore::with_values(config, [520u16, 1023])?;
    samples.write(3, 888u16)?;

    for i in 0..4 {
        println!("  Sample {}: {}", i, samples.read(i)?);
    }
    println!("  Buffer: {}", samples);

    match samples.write(1, 1024u16) {
        Ok(()) => println!("  unexpected: 1024 accepted"),
        Err(e) => println!("  Rejected 1024: {e}"),
    }
    println!();

    Ok(())
}

fn example_growth() -> Result<(), packed_store::PackedStoreError> {
    println!("Example 2: Writes past the end grow the buffer");

    let mut store = PackedArrayStore::with_values(StoreConfig::new(2, 2, 8), [120u8, 200, 80, 55])?;
    println!("  Before: {} data bytes", store.data_bytes().len());
    store.write(4, 33u8)?;
    println!("  After:  {} data bytes", store.data_bytes().len());
    println!("  Buffer: {}", store);
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), packed_store::PackedStoreError> {
    println!("Example 3: Memory savings comparison");

    let count = 10_000usize;

    // Standard Vec<u32>
    let standard_bytes = count * 4;

    // 12-bit elements (values 0-4095)
    let values = (0..count).map(|i| BigUint::from(i % 4096));
    let packed = PackedArrayStore::with_values(StoreConfig::new(1, 2, 12), values)?;
    let packed_bytes = packed.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 12-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
