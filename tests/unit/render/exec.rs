use super::*;

#[test]
fn for_each_row_visits_every_row_once() {
    let exec = RenderExec::new(None, CancelToken::new());
    let (w, h) = (5usize, 37usize);
    let mut buf = vec![0u8; w * h];
    exec.for_each_row(&mut buf, w, |y, row| {
        for px in row.iter_mut() {
            *px = px.wrapping_add(y as u8 + 1);
        }
    })
    .unwrap();
    for (y, row) in buf.chunks_exact(w).enumerate() {
        assert!(row.iter().all(|v| *v == y as u8 + 1));
    }
}

#[test]
fn cancelled_token_aborts_row_pass() {
    let token = CancelToken::new();
    token.cancel();
    assert!(token.is_cancelled());
    let exec = RenderExec::new(None, token);
    let mut buf = vec![0u8; 64];
    let err = exec.for_each_row(&mut buf, 8, |_, _| {}).unwrap_err();
    assert!(matches!(err, EmocanvasError::Cancelled));
}

#[test]
fn dedicated_pool_matches_global_pool() {
    let pool = build_thread_pool(Some(3)).unwrap();
    let a_exec = RenderExec::new(pool.as_ref(), CancelToken::new());
    let b_exec = RenderExec::new(None, CancelToken::new());
    let mut a = vec![0u8; 9 * 50];
    let mut b = a.clone();
    let shade = |y: u32, row: &mut [u8]| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = (x as u32 * 7 + y * 13) as u8;
        }
    };
    a_exec.for_each_row(&mut a, 9, shade).unwrap();
    b_exec.for_each_row(&mut b, 9, shade).unwrap();
    assert_eq!(a, b);
    let sum = a_exec.sum_rows(&a, 9, |row| row.len() as f64).unwrap();
    assert_eq!(sum, a.len() as f64);
}

#[test]
fn zero_threads_is_rejected() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert!(build_thread_pool(None).unwrap().is_none());
}
