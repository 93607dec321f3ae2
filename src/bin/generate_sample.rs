use anyhow::{Context, Result};
use serde::Serialize;

/// One abalone measurement, in the column order of the training file.
#[derive(Debug, Serialize)]
struct AbaloneRecord {
    sex: &'static str,
    length: f64,
    diameter: f64,
    height: f64,
    whole_weight: f64,
    shucked_weight: f64,
    viscera_weight: f64,
    shell_weight: f64,
    rings: u32,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Round to the precision the published dataset uses.
fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn generate_record(rng: &mut SimpleRng) -> AbaloneRecord {
    let sex = match rng.next_u64() % 3 {
        0 => "M",
        1 => "F",
        _ => "I",
    };
    // Infants are smaller; everything else scales off the shell length.
    let length = match sex {
        "I" => rng.uniform(0.075, 0.6),
        _ => rng.uniform(0.3, 0.815),
    };
    let diameter = length * rng.uniform(0.75, 0.82);
    let height = length * rng.uniform(0.28, 0.38);
    let whole_weight = 4.0 * length.powi(3) * rng.uniform(0.85, 1.15);
    let shucked_weight = whole_weight * rng.uniform(0.38, 0.48);
    let viscera_weight = whole_weight * rng.uniform(0.18, 0.24);
    let shell_weight = whole_weight * rng.uniform(0.26, 0.32);
    let rings = 1 + (length * 18.0 * rng.uniform(0.7, 1.3)) as u32;

    AbaloneRecord {
        sex,
        length: round(length, 3),
        diameter: round(diameter, 3),
        height: round(height, 3),
        whole_weight: round(whole_weight, 4),
        shucked_weight: round(shucked_weight, 4),
        viscera_weight: round(viscera_weight, 4),
        shell_weight: round(shell_weight, 4),
        rings,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 3133;

    let output_path = "abalone_dataset1_train.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for _ in 0..n_rows {
        writer
            .serialize(generate_record(&mut rng))
            .context("writing sample row")?;
    }
    writer.flush().context("flushing sample file")?;

    println!("Wrote {n_rows} abalone rows to {output_path}");
    Ok(())
}
