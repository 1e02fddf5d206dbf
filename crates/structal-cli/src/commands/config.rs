use crate::cli::{ConfigAction, ConfigArgs, ConfigResolveArgs};
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use structal::config::{CACHE_DIR, PDB_DIR, ProcessEnvironment, UserConfig};
use structal::core::io::xml::PrettyXmlWriter;
use tracing::info;

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Show(resolve_args) => {
            let (config, env) = resolve(&resolve_args);
            let xml = config.to_xml_string(&env)?;
            print!("{}", xml);
            Ok(())
        }
        ConfigAction::Write(write_args) => {
            let (config, env) = resolve(&write_args.resolve);
            let file = File::create(&write_args.output)?;
            let mut xw = PrettyXmlWriter::new(file);
            config.write_xml(&env, &mut xw)?;
            xw.into_inner().flush()?;
            info!("Wrote configuration to {}", write_args.output.display());
            Ok(())
        }
    }
}

/// Builds the environment from CLI flags (directory flags become property
/// overrides, so they are validated like any other candidate) and resolves.
fn resolve(args: &ConfigResolveArgs) -> (UserConfig, ProcessEnvironment) {
    let mut env = ProcessEnvironment::new();
    if let Some(dir) = &args.pdb_dir {
        env.set_property(PDB_DIR, dir);
    }
    if let Some(dir) = &args.cache_dir {
        env.set_property(CACHE_DIR, dir);
    }

    let mut config = UserConfig::resolve(&env);
    if args.no_autofetch {
        config.set_auto_fetch(false);
    }
    if args.no_split {
        config.set_split(false);
    }
    if let Some(format) = args.format {
        config.set_file_format(format);
    }
    (config, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use structal::config::FileFormat;

    fn resolve_args() -> ConfigResolveArgs {
        ConfigResolveArgs {
            pdb_dir: None,
            cache_dir: None,
            no_autofetch: false,
            no_split: false,
            format: None,
        }
    }

    #[test]
    fn directory_flags_feed_the_property_tier() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = resolve_args();
        args.pdb_dir = Some(dir.path().to_string_lossy().into_owned());

        let (config, _) = resolve(&args);
        assert!(config.pdb_file_path().starts_with(&*dir.path().to_string_lossy()));
    }

    #[test]
    fn flag_overrides_apply_after_resolution() {
        let mut args = resolve_args();
        args.no_autofetch = true;
        args.no_split = true;
        args.format = Some(FileFormat::MmCif);

        let (config, _) = resolve(&args);
        assert!(!config.auto_fetch());
        assert!(!config.is_split());
        assert_eq!(config.file_format(), FileFormat::MmCif);
    }

    #[test]
    fn written_file_contains_the_xml_document() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("config.xml");
        let args = crate::cli::ConfigArgs {
            action: ConfigAction::Write(crate::cli::ConfigWriteArgs {
                resolve: resolve_args(),
                output: output.clone(),
            }),
        };

        run(args).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("<?xml version='1.0' standalone='no' ?>"));
        assert!(content.contains("<JFatCatConfig>"));
        assert!(content.contains("<PDBFILEPATH"));
    }
}
