use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Generate a synthetic cyclic-voltammetry export for testing.
///
/// The file mimics the instrument layout: a parameter preamble, a blank
/// line, the tabular header, then comma-separated rows. The potential
/// follows a triangular sweep; the current is a capacitive offset plus an
/// oxidation bump on rising legs and a reduction dip on falling legs.
pub fn run(output: PathBuf, cycles: u32) -> Result<()> {
    let low = -0.2f64;
    let high = 0.6f64;
    let step = 0.01f64;
    let steps = ((high - low) / step).round() as usize;

    let mut content = String::new();
    content.push_str("Cyclic Voltammetry\n");
    content.push_str(&format!("Init E (V): {}\n", low));
    content.push_str(&format!("High E (V): {}\n", high));
    content.push_str(&format!("Low E (V): {}\n", low));
    content.push_str(&format!("Sample Interval (V): {}\n", step));
    content.push_str(&format!("Sweep Segments: {}\n", cycles * 2));
    content.push('\n');
    content.push_str("Potential/V, Current/A\n");

    for _ in 0..cycles {
        for i in 0..steps {
            let potential = low + step * i as f64;
            push_row(&mut content, potential, anodic_current(potential));
        }
        for i in 0..steps {
            let potential = high - step * i as f64;
            push_row(&mut content, potential, cathodic_current(potential));
        }
    }
    // Close the final leg on the starting potential.
    push_row(&mut content, low, cathodic_current(low));

    std::fs::write(&output, &content)
        .with_context(|| format!("Failed to write demo file: {}", output.display()))?;

    info!("demo scan: {} legs of {} samples", cycles * 2, steps);
    println!(
        "Wrote synthetic CV scan with {} cycles to {}",
        cycles,
        output.display()
    );
    Ok(())
}

fn push_row(content: &mut String, potential: f64, current: f64) {
    content.push_str(&format!("{:.4}, {:.6e}\n", potential, current));
}

fn anodic_current(potential: f64) -> f64 {
    1.0e-6 * (0.2 + 2.0 * gaussian(potential, 0.25, 0.06))
}

fn cathodic_current(potential: f64) -> f64 {
    -1.0e-6 * (0.2 + 2.0 * gaussian(potential, 0.18, 0.06))
}

fn gaussian(x: f64, center: f64, width: f64) -> f64 {
    let d = (x - center) / width;
    (-0.5 * d * d).exp()
}
