#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub generation_model: Option<String>,
    // Without these the content store runs purely in memory.
    pub supabase_project_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub admin_password: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY")
                .expect("OPENROUTER_API_KEY not set"),
            generation_model: std::env::var("GENERATION_MODEL").ok(),
            supabase_project_url: std::env::var("SUPABASE_PROJECT_URL").ok(),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD not set"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET not set"),
        }
    }
}
