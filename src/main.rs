fn main() {
    dioxus::launch(happy::client::App);
}
