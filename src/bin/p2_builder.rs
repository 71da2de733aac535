// Pattern 2: Builder - Assembling Computers
// Director presets, hand-built configurations, and builder reuse.

use colored::Colorize;
use design_patterns::builder::{
    ComputerBuilder, ComputerDirector, GamingComputerBuilder, OfficeComputerBuilder,
};

fn director_example() {
    let mut gaming = ComputerDirector::new(GamingComputerBuilder::new());
    println!("{}", "Gaming computer:".bold());
    println!("{}\n", gaming.build_gaming());

    let mut office = ComputerDirector::new(OfficeComputerBuilder::new());
    println!("{}", "Office computer:".bold());
    println!("{}\n", office.build_office());

    println!("{}", "Budget computer:".bold());
    println!("{}", office.build_budget());
}

fn manual_example() {
    let custom = GamingComputerBuilder::new()
        .processor("AMD Ryzen 9 7900X")
        .memory("64GB DDR5 6000MHz")
        .storage("2TB NVMe SSD")
        .graphics("RTX 4090")
        .monitor("32\" 4K 144Hz")
        .build();
    println!("{}", "Custom gaming computer:".bold());
    println!("{}\n", custom);

    let workstation = GamingComputerBuilder::new()
        .processor("Intel Core i9-13900K")
        .memory("128GB DDR5 5600MHz")
        .storage("4TB NVMe SSD")
        .graphics("RTX 4080")
        .monitor("34\" Ultrawide 1440p 144Hz")
        .build();
    println!("{}", "Development workstation:".bold());
    println!("{}", workstation);

    // The office builder has its own opinion about graphics cards.
    let office = OfficeComputerBuilder::new()
        .processor("Intel Core i5-12400")
        .graphics("RTX 4090")
        .build();
    println!(
        "\nOffice builder asked for RTX 4090, installed: {}",
        office.graphics().yellow()
    );
}

fn reuse_example() {
    let mut builder = GamingComputerBuilder::new();

    builder
        .processor("Intel Core i5-13600K")
        .memory("16GB DDR4 3200MHz")
        .storage("500GB NVMe SSD")
        .graphics("RTX 3060")
        .monitor("24\" 1080p 144Hz");
    println!("{}", "Basic configuration:".bold());
    println!("{}\n", builder.build());

    builder.reset();
    builder
        .processor("AMD Ryzen 9 7950X")
        .memory("128GB DDR5 6400MHz")
        .storage("8TB NVMe SSD")
        .graphics("RTX 4090")
        .monitor("49\" Super Ultrawide 5120x1440 240Hz");
    println!("{}", "Premium configuration:".bold());
    println!("{}", builder.build());
}

fn main() {
    println!("{}", "Pattern 2: Builder - Assembling Computers".bold());
    println!("==========================================\n");

    println!("=== Director Presets ===");
    director_example();
    println!();

    println!("=== Manual Construction ===");
    manual_example();
    println!();

    println!("=== Reusing a Builder ===");
    reuse_example();

    println!("\n=== Key Points ===");
    println!("- Setters take &mut self and return &mut Self for chaining");
    println!("- build() borrows, so one builder can produce many computers");
    println!("- The director encodes recipes; the builder decides how parts are applied");
}
