use clap::ValueEnum;
use prism_variants::VariantId;

/// Variant selector for `--variant`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum VariantArg {
    /// CommonJS, development mode
    #[value(name = "cjs-development")]
    CjsDevelopment,

    /// CommonJS, minified production build
    #[value(name = "cjs-production")]
    CjsProduction,

    /// ES modules, validation declarations wrapped for consumers to drop
    #[value(name = "esm")]
    Esm,

    /// UMD for script tags, validation library left external
    #[value(name = "umd-development")]
    UmdDevelopment,

    /// UMD for script tags, minified with validation stripped
    #[value(name = "umd-production")]
    UmdProduction,
}

impl From<VariantArg> for VariantId {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::CjsDevelopment => VariantId::CjsDevelopment,
            VariantArg::CjsProduction => VariantId::CjsProduction,
            VariantArg::Esm => VariantId::Esm,
            VariantArg::UmdDevelopment => VariantId::UmdDevelopment,
            VariantArg::UmdProduction => VariantId::UmdProduction,
        }
    }
}
