fn main() {
    cynic_codegen::register_schema("admin")
        .from_sdl_file("../../schemas/admin.graphql")
        .expect("Failed to find admin GraphQL schema")
        .as_default()
        .expect("Failed to set admin schema as default");
}
