//! Init command implementation

use crate::cli::args::InitArgs;
use crate::cli::logging::{log, LogLevel};
use crate::templates::generate_yaml;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    if args.path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        ));
    }

    let template = args.template.template();
    log(
        level,
        LogLevel::Verbose,
        &format!("Template: {template:?}"),
    );

    let yaml = generate_yaml(template);
    std::fs::write(&args.path, yaml).map_err(|e| format!("Write error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {}", args.path.display()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TemplateArg;
    use crate::manifest::load_manifest;
    use tempfile::TempDir;

    fn args_for(path: std::path::PathBuf, force: bool) -> InitArgs {
        InitArgs {
            path,
            template: TemplateArg::Default,
            force,
        }
    }

    #[test]
    fn test_init_writes_loadable_manifest() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("train.yaml");

        run_init(args_for(path.clone(), false), LogLevel::Quiet).expect("init should succeed");

        let manifest = load_manifest(&path).expect("generated manifest should load");
        assert_eq!(manifest.trainer.accelerator, "gpu");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("train.yaml");
        std::fs::write(&path, "placeholder").expect("write");

        let result = run_init(args_for(path.clone(), false), LogLevel::Quiet);
        assert!(result.is_err());

        run_init(args_for(path, true), LogLevel::Quiet).expect("force should overwrite");
    }
}
