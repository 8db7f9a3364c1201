pub mod annotate_images_use_case;
pub mod compare_faces_use_case;
pub mod run_error;
