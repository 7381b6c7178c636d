mod auth;
pub use self::auth::{
    GoogleLoginRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    VerifyEmailRequest,
};

mod todo;
pub use self::todo::{CreateTodoRequest, Todo, TodoID};

mod user;
pub use self::user::{
    CodeRequest, EmailRequest, PasswordRequest, UpdatePasswordRequest, UpdateUsernameRequest,
    User, UserID,
};
