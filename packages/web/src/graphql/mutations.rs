//! GraphQL mutation definitions used by the auth server functions

// ============================================================================
// AUTH MUTATIONS
// ============================================================================

/// Exchange credentials for a session token (`null` when rejected)
pub const LOGIN: &str = r#"
  mutation Login($email: String!, $password: String!) {
    login(email: $email, password: $password)
  }
"#;

/// Create an account and return its session token
pub const REGISTER: &str = r#"
  mutation Register($input: RegisterInput!) {
    register(input: $input)
  }
"#;
