#[tokio::main]
async fn main() {
    advert_board::boot::boot().await;
}
