fn main() {
    #[cfg(target_arch = "wasm32")]
    kikan_widget::boot();
}
