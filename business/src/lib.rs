pub mod application {
    pub mod bootstrap {
        pub mod client_bootstrapper;
    }
    pub mod student_call {
        pub mod call_student;
        pub mod clear_panels;
        pub mod purge_expired;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod bootstrap {
        pub mod client;
        pub mod config;
        pub mod connector;
        pub mod errors;
        pub mod state;
    }
    pub mod student_call {
        pub mod errors;
        pub mod model;
        pub mod panel;
        pub mod repository;
        pub mod use_cases {
            pub mod call_student;
            pub mod clear_panels;
            pub mod purge_expired;
        }
    }
}
