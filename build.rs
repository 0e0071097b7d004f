fn main() {
    println!("cargo:rerun-if-changed=resources/windows/resources.rc");
    println!("cargo:rerun-if-changed=resources/windows/enlaut.manifest");

    // Build scripts run on the host; the target OS comes from Cargo's env
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        embed_windows_resources();
    }
}

fn embed_windows_resources() {
    if let Err(e) =
        embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE)
            .manifest_optional()
    {
        println!("cargo:warning=failed to embed Windows resources: {}", e);
    }
}
