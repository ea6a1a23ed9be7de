mod supabase;

pub use supabase::{AuthError, AuthUser, SupabaseAuthClient};
