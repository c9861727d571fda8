use maze_canvas::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
