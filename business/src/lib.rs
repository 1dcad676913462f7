pub mod application {
    pub mod item {
        pub mod controller;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        mod image_sync;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod item {
        pub mod cache;
        pub mod errors;
        pub mod image;
        pub mod lifecycle;
        pub mod model;
        pub mod money;
        pub mod profit;
        pub mod repository;
        pub mod services;
        pub mod validation;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod paths;
        pub mod value_objects;
    }
}
