fn main() {
    cynic_codegen::register_schema("admin")
        .from_sdl_file("schemas/admin.graphql")
        .expect("failed to load admin.graphql schema file")
        .as_default()
        .expect("failed to register admin schema as default");
}
