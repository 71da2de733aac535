//! Pattern 2: Builder
//!
//! Mutable (`&mut self`) builders behind a common trait, plus a director
//! that knows a few standard recipes. `build` borrows the builder, so one
//! builder can produce many computers.

use std::fmt;

pub const INTEGRATED_GRAPHICS: &str = "Integrated graphics";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    processor: String,
    memory: String,
    storage: String,
    graphics: String,
    monitor: String,
}

impl Computer {
    pub fn processor(&self) -> &str {
        &self.processor
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn graphics(&self) -> &str {
        &self.graphics
    }

    pub fn monitor(&self) -> &str {
        &self.monitor
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computer:")?;
        writeln!(f, "  Processor: {}", self.processor)?;
        writeln!(f, "  Memory: {}", self.memory)?;
        writeln!(f, "  Storage: {}", self.storage)?;
        writeln!(f, "  Graphics: {}", self.graphics)?;
        write!(f, "  Monitor: {}", self.monitor)
    }
}

pub trait ComputerBuilder {
    fn processor(&mut self, processor: impl Into<String>) -> &mut Self;
    fn memory(&mut self, memory: impl Into<String>) -> &mut Self;
    fn storage(&mut self, storage: impl Into<String>) -> &mut Self;
    fn graphics(&mut self, graphics: impl Into<String>) -> &mut Self;
    fn monitor(&mut self, monitor: impl Into<String>) -> &mut Self;

    /// Snapshot of everything set so far.
    fn build(&self) -> Computer;

    fn reset(&mut self);
}

/// Takes every part exactly as requested.
#[derive(Debug, Default)]
pub struct GamingComputerBuilder {
    computer: Computer,
}

impl GamingComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for GamingComputerBuilder {
    fn processor(&mut self, processor: impl Into<String>) -> &mut Self {
        self.computer.processor = processor.into();
        self
    }

    fn memory(&mut self, memory: impl Into<String>) -> &mut Self {
        self.computer.memory = memory.into();
        self
    }

    fn storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.computer.storage = storage.into();
        self
    }

    fn graphics(&mut self, graphics: impl Into<String>) -> &mut Self {
        self.computer.graphics = graphics.into();
        self
    }

    fn monitor(&mut self, monitor: impl Into<String>) -> &mut Self {
        self.computer.monitor = monitor.into();
        self
    }

    fn build(&self) -> Computer {
        self.computer.clone()
    }

    fn reset(&mut self) {
        self.computer = Computer::default();
    }
}

/// Office machines never get a discrete card: whatever graphics part is
/// requested, integrated graphics are installed.
#[derive(Debug, Default)]
pub struct OfficeComputerBuilder {
    computer: Computer,
}

impl OfficeComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for OfficeComputerBuilder {
    fn processor(&mut self, processor: impl Into<String>) -> &mut Self {
        self.computer.processor = processor.into();
        self
    }

    fn memory(&mut self, memory: impl Into<String>) -> &mut Self {
        self.computer.memory = memory.into();
        self
    }

    fn storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.computer.storage = storage.into();
        self
    }

    fn graphics(&mut self, _graphics: impl Into<String>) -> &mut Self {
        self.computer.graphics = INTEGRATED_GRAPHICS.to_string();
        self
    }

    fn monitor(&mut self, monitor: impl Into<String>) -> &mut Self {
        self.computer.monitor = monitor.into();
        self
    }

    fn build(&self) -> Computer {
        self.computer.clone()
    }

    fn reset(&mut self) {
        self.computer = Computer::default();
    }
}

pub struct ComputerDirector<B: ComputerBuilder> {
    builder: B,
}

impl<B: ComputerBuilder> ComputerDirector<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn build_gaming(&mut self) -> Computer {
        self.builder
            .processor("Intel Core i7-12700K")
            .memory("32GB DDR4 3600MHz")
            .storage("1TB NVMe SSD")
            .graphics("RTX 4070 Ti")
            .monitor("27\" 1440p 165Hz")
            .build()
    }

    pub fn build_office(&mut self) -> Computer {
        self.builder
            .processor("Intel Core i5-12400")
            .memory("16GB DDR4 3200MHz")
            .storage("512GB SATA SSD")
            .graphics(INTEGRATED_GRAPHICS)
            .monitor("24\" 1080p 60Hz")
            .build()
    }

    pub fn build_budget(&mut self) -> Computer {
        self.builder
            .processor("Intel Core i3-12100")
            .memory("8GB DDR4 2666MHz")
            .storage("256GB SATA SSD")
            .graphics(INTEGRATED_GRAPHICS)
            .monitor("21.5\" 1080p 60Hz")
            .build()
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    pub fn into_inner(self) -> B {
        self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaming_builder_keeps_every_part() {
        let computer = GamingComputerBuilder::new()
            .processor("AMD Ryzen 9 7900X")
            .memory("64GB DDR5 6000MHz")
            .storage("2TB NVMe SSD")
            .graphics("RTX 4090")
            .monitor("32\" 4K 144Hz")
            .build();

        assert_eq!(computer.processor(), "AMD Ryzen 9 7900X");
        assert_eq!(computer.memory(), "64GB DDR5 6000MHz");
        assert_eq!(computer.storage(), "2TB NVMe SSD");
        assert_eq!(computer.graphics(), "RTX 4090");
        assert_eq!(computer.monitor(), "32\" 4K 144Hz");
    }

    #[test]
    fn test_office_builder_forces_integrated_graphics() {
        let computer = OfficeComputerBuilder::new()
            .processor("Intel Core i5-12400")
            .graphics("RTX 4090")
            .build();

        assert_eq!(computer.graphics(), INTEGRATED_GRAPHICS);
        assert_eq!(computer.processor(), "Intel Core i5-12400");
    }

    #[test]
    fn test_unset_parts_are_empty() {
        let computer = GamingComputerBuilder::new().processor("Intel Core i3-12100").build();
        assert_eq!(computer.memory(), "");
        assert_eq!(computer.monitor(), "");
    }

    #[test]
    fn test_build_is_a_snapshot() {
        let mut builder = GamingComputerBuilder::new();
        builder.processor("Intel Core i5-13600K").graphics("RTX 3060");
        let first = builder.build();

        builder.graphics("RTX 4090");
        let second = builder.build();

        assert_eq!(first.graphics(), "RTX 3060");
        assert_eq!(second.graphics(), "RTX 4090");
        assert_eq!(first.processor(), second.processor());
    }

    #[test]
    fn test_reset_clears_builder() {
        let mut builder = GamingComputerBuilder::new();
        builder.processor("AMD Ryzen 9 7950X").memory("128GB DDR5 6400MHz");
        builder.reset();
        assert_eq!(builder.build(), Computer::default());
    }

    #[test]
    fn test_director_presets() {
        let mut director = ComputerDirector::new(GamingComputerBuilder::new());
        let gaming = director.build_gaming();
        assert_eq!(gaming.processor(), "Intel Core i7-12700K");
        assert_eq!(gaming.graphics(), "RTX 4070 Ti");

        let mut director = ComputerDirector::new(OfficeComputerBuilder::new());
        let office = director.build_office();
        let budget = director.build_budget();

        assert_eq!(office.processor(), "Intel Core i5-12400");
        assert_eq!(office.monitor(), "24\" 1080p 60Hz");
        assert_eq!(budget.processor(), "Intel Core i3-12100");
        assert_eq!(budget.storage(), "256GB SATA SSD");
        // The office build is unaffected by the budget build that followed.
        assert_eq!(office.storage(), "512GB SATA SSD");
    }

    #[test]
    fn test_gaming_preset_through_office_builder_loses_discrete_card() {
        let mut director = ComputerDirector::new(OfficeComputerBuilder::new());
        assert_eq!(director.build_gaming().graphics(), INTEGRATED_GRAPHICS);
    }

    #[test]
    fn test_director_builder_access() {
        let mut director = ComputerDirector::new(GamingComputerBuilder::new());
        director.build_gaming();
        director.builder_mut().monitor("34\" Ultrawide 1440p 144Hz");

        let builder = director.into_inner();
        let computer = builder.build();
        assert_eq!(computer.monitor(), "34\" Ultrawide 1440p 144Hz");
        assert_eq!(computer.processor(), "Intel Core i7-12700K");
    }

    #[test]
    fn test_display_card() {
        let computer = ComputerDirector::new(OfficeComputerBuilder::new()).build_budget();
        let expected = "Computer:\n\
                        \x20 Processor: Intel Core i3-12100\n\
                        \x20 Memory: 8GB DDR4 2666MHz\n\
                        \x20 Storage: 256GB SATA SSD\n\
                        \x20 Graphics: Integrated graphics\n\
                        \x20 Monitor: 21.5\" 1080p 60Hz";
        assert_eq!(computer.to_string(), expected);
    }
}
