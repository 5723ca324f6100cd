//! The generation pipeline: clean, provision, copy, mirror, render.

use std::path::Path;

use tracing::{debug, info};

use crate::adapters::template::ArtifactRenderer;
use crate::app::AppContext;
use crate::app::commands::{clean, mirror, provision};
use crate::domain::{
    AppError, GenerationRequest, GenerationSummary, LifecycleScriptSet, PipelinePolicy,
    PipelineStep, ResolvedLayout, ServiceDescriptor,
};
use crate::ports::{BundledWrapper, DeploymentFilesystem, WrapperDownloader};

fn run_step<T>(step: PipelineStep, f: impl FnOnce() -> Result<T, AppError>) -> Result<T, AppError> {
    debug!(step = %step, "Starting step");
    f().map_err(|err| err.in_step(step))
}

fn verify_jar_source<F: DeploymentFilesystem>(
    filesystem: &F,
    jar_source: &Path,
) -> Result<(), AppError> {
    if filesystem.exists(jar_source) {
        Ok(())
    } else {
        Err(AppError::JarNotFound { path: jar_source.display().to_string() })
    }
}

/// Run the whole pipeline for `request`.
///
/// Steps run in a fixed order. A failing step aborts the run wrapped as
/// `AppError::Generation`, except where `policy` lets it accumulate warnings.
pub fn execute<F, D, B>(
    ctx: &AppContext<F, D, B>,
    request: &GenerationRequest,
    policy: &PipelinePolicy,
) -> Result<GenerationSummary, AppError>
where
    F: DeploymentFilesystem,
    D: WrapperDownloader,
    B: BundledWrapper,
{
    let filesystem = ctx.filesystem();

    let layout = run_step(PipelineStep::ResolvePaths, || ResolvedLayout::resolve(request))?;
    // Nothing is deleted or written for a project whose jar was never built.
    run_step(PipelineStep::VerifyJar, || verify_jar_source(filesystem, &layout.jar_source))?;

    let removed = run_step(PipelineStep::Clean, || clean::execute(filesystem, &layout))?;

    run_step(PipelineStep::CreateDirectories, || {
        filesystem.create_dir_all(&layout.bin_dir)?;
        filesystem.create_dir_all(&layout.jar_output_dir)
    })?;

    let wrapper = run_step(PipelineStep::ProvisionWrapper, || {
        provision::execute(ctx, &layout.executable, &request.wrapper)
    })?;

    run_step(PipelineStep::VerifyJar, || verify_jar_source(filesystem, &layout.jar_source))?;

    run_step(PipelineStep::CopyJar, || {
        if filesystem.same_file(&layout.jar_source, &layout.jar_target) {
            debug!(path = %layout.jar_target.display(), "Jar already in place");
            return Ok(());
        }
        filesystem.copy_file(&layout.jar_source, &layout.jar_target)?;
        info!(to = %layout.jar_target.display(), "Copied jar");
        Ok(())
    })?;

    let mirrored = run_step(PipelineStep::MirrorDirectories, || {
        mirror::execute(
            filesystem,
            &layout.mirrors,
            policy.for_step(PipelineStep::MirrorDirectories),
        )
    })?;

    run_step(PipelineStep::CreateLogDirectory, || {
        filesystem.create_dir_all(&layout.log.directory)?;
        info!(
            directory = %layout.log.directory.display(),
            logpath = %layout.log.literal,
            "Created log directory"
        );
        Ok(())
    })?;

    let renderer = run_step(PipelineStep::WriteDescriptor, || {
        let renderer = ArtifactRenderer::new()?;
        let descriptor = ServiceDescriptor::new(request, &layout);
        filesystem.write_file(&layout.descriptor, &renderer.render_descriptor(&descriptor)?)?;
        info!(path = %layout.descriptor.display(), "Wrote service descriptor");
        Ok(renderer)
    })?;

    let scripts = run_step(PipelineStep::WriteScripts, || {
        let mut scripts = Vec::new();
        for (script, context) in LifecycleScriptSet::for_service(&request.service_id).iter() {
            let path = layout.script_path(*script);
            filesystem.write_file(&path, &renderer.render_script(context)?)?;
            filesystem.set_executable(&path)?;
            debug!(path = %path.display(), "Wrote lifecycle script");
            scripts.push(path);
        }
        info!(count = scripts.len(), dir = %layout.bin_dir.display(), "Wrote lifecycle scripts");
        Ok(scripts)
    })?;

    Ok(GenerationSummary {
        service_id: request.service_id.to_string(),
        executable: layout.executable.clone(),
        descriptor: layout.descriptor.clone(),
        jar: layout.jar_target.clone(),
        scripts,
        log_directory: layout.log.directory.clone(),
        mirrored: mirrored.mirrored,
        wrapper,
        removed,
        warnings: mirrored.warnings,
    })
}
