use minigit_core::{Repository, SequentialGenerator, SharedRepository};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_commits_are_serialised() -> anyhow::Result<()> {
    let repo = SharedRepository::new(
        Repository::builder("proj")
            .id_generator(SequentialGenerator::default())
            .build()?,
    );

    let mut handles = Vec::new();
    for worker in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..25 {
                repo.commit(format!("worker {} commit {}", worker, i)).await;
            }
        }));
    }
    for handle in handles {
        handle.await?;
    }

    assert_eq!(repo.len().await, 200);
    let history = repo.history(1000).await?;
    assert_eq!(history.lines().count(), 200);
    assert!(history.starts_with("c200: "));
    Ok(())
}

#[tokio::test]
async fn test_snapshot_round_trip_through_json() -> anyhow::Result<()> {
    let repo = SharedRepository::from(Repository::new("proj")?);
    repo.commit("init").await;
    repo.commit("add feature").await;

    let json = repo.snapshot().await.to_json()?;
    let restored = Repository::from_snapshot(minigit_core::Snapshot::from_json(&json)?)?;

    assert_eq!(restored.to_string(), repo.describe().await);
    assert_eq!(restored.history(10)?, repo.history(10).await?);
    Ok(())
}
