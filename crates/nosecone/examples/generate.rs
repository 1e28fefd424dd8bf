//! Generate the default nose cone and print a cross-family comparison.

use anyhow::Result;
use nosecone::{compare_families, GeneratorConfig, Pipeline};

fn main() -> Result<()> {
    let config = GeneratorConfig::default();
    let generated = Pipeline::from_config(&config).run()?;

    println!(
        "{} profile, {} triangles",
        config.profile_type.name(),
        generated.solid.mesh.num_triangles()
    );
    for w in &generated.warnings {
        println!("thin wall over z {:.2}..{:.2} mm", w.z_start, w.z_end);
    }
    for (key, value) in generated.metrics.report() {
        println!("{key:>22}: {value:10.2}");
    }

    println!("\nfamily comparison:");
    for (family, m) in compare_families(&config)? {
        println!(
            "{:>10}: volume {:10.0} mm3  area {:8.0} mm2  com {:6.2} mm",
            family.name(),
            m.volume,
            m.surface_area,
            m.center_of_mass_offset
        );
    }
    Ok(())
}
