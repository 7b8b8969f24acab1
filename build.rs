use vergen_gitcl::{BuildBuilder, Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let gitcl = GitclBuilder::default()
        .branch(true)
        .sha(true)
        .dirty(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&gitcl)?
        .emit()?;

    // Client for the SDK itself; server traits are used by the in-process tests.
    let proto_file = "proto/apigateway.proto";
    println!("cargo:rerun-if-changed={proto_file}");

    let mut config = prost_build::Config::new();
    config.protoc_executable(protoc_bin_vendored::protoc_bin_path().map_err(|e| e.to_string())?);

    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos_with_config(config, &[proto_file], &["proto"])?;

    Ok(())
}
